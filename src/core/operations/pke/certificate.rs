//! Public key import from DER-encoded X.509 certificates.

use x509_cert::der::Decode;
use x509_cert::Certificate;

use rsa::{BigUint, RsaPublicKey};

use crate::core::error::{EnvelopeError, EnvelopeResult};
use crate::core::types::RecipientKey;

/// Resolves the recipient's public key from a DER-encoded X.509 certificate.
///
/// The certificate is evaluated on its own: it must parse, its inner and
/// outer signature algorithms must agree, and its subject public key must
/// be an RSA key of at most [`MAX_MODULUS_BITS`] bits. No chain or
/// validity-period policy is applied.
///
/// # Errors
///
/// [`EnvelopeError::InvalidCertificate`] for every failure.
pub fn import_public_key(der: &[u8]) -> EnvelopeResult<RecipientKey> {
    let certificate = Certificate::from_der(der).map_err(|e| {
        tracing::debug!(error = %e, "certificate rejected: malformed DER");
        EnvelopeError::InvalidCertificate
    })?;

    evaluate(&certificate)?;

    let key = rsa_public_key(&certificate)?;

    let recipient = RecipientKey::new(key);
    tracing::debug!(bits = recipient.size_bits(), "imported recipient public key");
    Ok(recipient)
}

/// Largest accepted RSA modulus in bits.
pub const MAX_MODULUS_BITS: usize = 16_384;

/// Extracts the subject's RSA key, accepting moduli up to [`MAX_MODULUS_BITS`].
fn rsa_public_key(certificate: &Certificate) -> EnvelopeResult<RsaPublicKey> {
    let spki = &certificate.tbs_certificate.subject_public_key_info;
    if spki.algorithm.oid != rsa::pkcs1::ALGORITHM_OID {
        tracing::debug!(oid = %spki.algorithm.oid, "certificate rejected: not an rsa key");
        return Err(EnvelopeError::InvalidCertificate);
    }

    let der = spki
        .subject_public_key
        .as_bytes()
        .ok_or(EnvelopeError::InvalidCertificate)?;
    let parts = rsa::pkcs1::RsaPublicKey::from_der(der).map_err(|e| {
        tracing::debug!(error = %e, "certificate rejected: malformed rsa public key");
        EnvelopeError::InvalidCertificate
    })?;

    let n = BigUint::from_bytes_be(parts.modulus.as_bytes());
    let e = BigUint::from_bytes_be(parts.public_exponent.as_bytes());
    RsaPublicKey::new_with_max_size(n, e, MAX_MODULUS_BITS).map_err(|err| {
        tracing::debug!(error = %err, "certificate rejected: no usable rsa public key");
        EnvelopeError::InvalidCertificate
    })
}

/// Structural evaluation of a lone certificate.
fn evaluate(certificate: &Certificate) -> EnvelopeResult<()> {
    if certificate.tbs_certificate.signature != certificate.signature_algorithm {
        tracing::debug!("certificate rejected: signature algorithm mismatch");
        return Err(EnvelopeError::InvalidCertificate);
    }

    if certificate.signature.raw_bytes().is_empty() {
        tracing::debug!("certificate rejected: empty signature");
        return Err(EnvelopeError::InvalidCertificate);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            import_public_key(&[]),
            Err(EnvelopeError::InvalidCertificate)
        ));
    }

    #[test]
    fn test_garbage_input() {
        assert!(matches!(
            import_public_key(b"this is not a certificate"),
            Err(EnvelopeError::InvalidCertificate)
        ));
    }

    #[test]
    fn test_import_2048() -> EnvelopeResult<()> {
        let der = include_bytes!("../../../../tests/fixtures/certificate.der");
        assert_eq!(import_public_key(der)?.size_bits(), 2048);
        Ok(())
    }

    #[test]
    fn test_import_above_default_rsa_limit() -> EnvelopeResult<()> {
        let der = include_bytes!("../../../../tests/fixtures/certificate_8192.der");
        let recipient = import_public_key(der)?;
        assert_eq!(recipient.size_bits(), 8192);
        assert_eq!(recipient.size_bytes(), 1024);
        Ok(())
    }

    #[test]
    fn test_truncated_sequence() {
        // SEQUENCE header claiming more content than is present
        assert!(matches!(
            import_public_key(&[0x30, 0x82, 0x03, 0x27, 0x30, 0x82]),
            Err(EnvelopeError::InvalidCertificate)
        ));
    }
}
