// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cert_track_domain::{Application, CertificateKind, IdentityNumber};

/// Returns true if an application for the same hall ticket and certificate
/// kind exists among pending applications or verified certificates.
///
/// Matching is exact and case-sensitive. No normalization is applied.
#[must_use]
pub fn is_duplicate(
    applications: &[Application],
    verified: &[Application],
    identity_number: &IdentityNumber,
    certificate_kind: CertificateKind,
) -> bool {
    applications.iter().chain(verified.iter()).any(|existing| {
        existing.identity_number() == identity_number
            && existing.certificate_kind() == certificate_kind
    })
}
