use crate::{
    domain::Domain,
    error::{SigningResult, TreeHashError},
    tree_hash::{merkleize_container, HashTreeRoot, Root},
};

use log::{debug, trace};
use relay_bls::{CurveBackend, DefaultBackend, PublicKey, SecretKey, Signature};

/// Container binding an object root to a domain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SigningData {
    pub object_root: Root,
    pub domain: Domain,
}

impl SigningData {
    /// The root that is actually signed
    pub fn signing_root(&self) -> Root {
        // two 32-byte fields cannot exceed any limit
        merkleize_container(&[self.object_root, *self.domain.as_bytes()]).unwrap_or_default()
    }
}

impl HashTreeRoot for SigningData {
    fn hash_tree_root(&self) -> Result<Root, TreeHashError> {
        Ok(self.signing_root())
    }
}

/// Computes `hash_tree_root(SigningData { object_root, domain })`. Fails only if the
/// object cannot be hashed.
pub fn compute_signing_root<T: HashTreeRoot + ?Sized>(
    object: &T,
    domain: Domain,
) -> SigningResult<Root> {
    let object_root = object.hash_tree_root()?;
    Ok(signing_root_from_object_root(object_root, domain))
}

fn signing_root_from_object_root(object_root: Root, domain: Domain) -> Root {
    let signing_root = SigningData {
        object_root,
        domain,
    }
    .signing_root();
    trace!(
        "signing root {} for object {} under domain {}",
        hex::encode(signing_root),
        hex::encode(object_root),
        domain
    );
    signing_root
}

/// Signs the signing root of `object` under `domain`.
pub fn sign_message<T: HashTreeRoot + ?Sized, B: CurveBackend>(
    object: &T,
    domain: Domain,
    secret_key: &SecretKey<B>,
) -> SigningResult<Signature<B>> {
    let signing_root = compute_signing_root(object, domain)?;
    Ok(secret_key.sign(&signing_root)?)
}

/// Verifies a signature over `object` under `domain` with the default backend.
///
/// Decoding failures of the key or signature are errors; a well-formed signature that
/// does not match is `Ok(false)`.
pub fn verify_signature<T: HashTreeRoot + ?Sized>(
    object: &T,
    domain: Domain,
    public_key: &[u8],
    signature: &[u8],
) -> SigningResult<bool> {
    verify_signature_with::<DefaultBackend, T>(object, domain, public_key, signature)
}

/// Same as [`verify_signature`] with an explicit curve backend.
pub fn verify_signature_with<B: CurveBackend, T: HashTreeRoot + ?Sized>(
    object: &T,
    domain: Domain,
    public_key: &[u8],
    signature: &[u8],
) -> SigningResult<bool> {
    let signing_root = compute_signing_root(object, domain)?;
    verify_signing_root::<B>(&signing_root, public_key, signature)
}

/// Verifies a signature against an already computed object root.
pub fn verify_signature_by_root(
    object_root: Root,
    domain: Domain,
    public_key: &[u8],
    signature: &[u8],
) -> SigningResult<bool> {
    verify_signature_by_root_with::<DefaultBackend>(object_root, domain, public_key, signature)
}

/// Same as [`verify_signature_by_root`] with an explicit curve backend.
pub fn verify_signature_by_root_with<B: CurveBackend>(
    object_root: Root,
    domain: Domain,
    public_key: &[u8],
    signature: &[u8],
) -> SigningResult<bool> {
    let signing_root = signing_root_from_object_root(object_root, domain);
    verify_signing_root::<B>(&signing_root, public_key, signature)
}

fn verify_signing_root<B: CurveBackend>(
    signing_root: &Root,
    public_key: &[u8],
    signature: &[u8],
) -> SigningResult<bool> {
    let signature = Signature::<B>::from_bytes(signature)?;
    let public_key = PublicKey::<B>::from_bytes(public_key)?;
    let valid = public_key.verify(signing_root, &signature)?;
    if !valid {
        debug!(
            "signature over {} rejected for {}",
            hex::encode(signing_root),
            public_key
        );
    }
    Ok(valid)
}
