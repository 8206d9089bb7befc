//! Integration tests for the stored credential format

use miami_auth::{superadmin_upsert_sql, PasswordService};
use miami_core::models::SeedUser;
use sha2::{Digest, Sha256};
use std::collections::HashSet;

fn is_credential(s: &str) -> bool {
    let Some((salt, digest)) = s.split_once(':') else {
        return false;
    };
    let lower_hex = |part: &str| part.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'));
    salt.len() == 32 && digest.len() == 64 && lower_hex(salt) && lower_hex(digest)
}

#[test]
fn test_credential_matches_format() {
    let hash = PasswordService::new().hash_password(&SeedUser::superadmin().password);
    assert!(is_credential(&hash), "bad credential: {}", hash);
}

#[test]
fn test_digest_is_sha256_of_password_and_salt_text() {
    let hash = PasswordService::new().hash_password("PAssword!33!");
    let (salt, digest) = hash.split_once(':').unwrap();

    let expected = hex::encode(Sha256::digest(format!("PAssword!33!{}", salt).as_bytes()));
    assert_eq!(digest, expected);
}

#[test]
fn test_runs_never_share_a_salt() {
    let service = PasswordService::new();
    let salts: HashSet<String> = (0..64)
        .map(|_| {
            let hash = service.hash_password("PAssword!33!");
            hash.split(':').next().unwrap().to_string()
        })
        .collect();
    assert_eq!(salts.len(), 64);
}

#[test]
fn test_upsert_carries_verifiable_credential() {
    let user = SeedUser::superadmin();
    let service = PasswordService::new();
    let sql = superadmin_upsert_sql(&user, &service.hash_password(&user.password));

    assert!(sql.contains("ON CONFLICT (email) DO UPDATE"));
    let stored = sql
        .split('\'')
        .find(|part| is_credential(part))
        .expect("credential literal in upsert");
    assert!(service.verify_password("PAssword!33!", stored).unwrap());
}
