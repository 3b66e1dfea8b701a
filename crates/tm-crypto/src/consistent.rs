use tm_types::RoleName;

/// Content-addressed name for `role` pinned to `checksum`:
/// `"<role>.<hex checksum>"`.
///
/// An empty checksum leaves the role name unchanged.
pub fn consistent_name(role: &str, checksum: &[u8]) -> RoleName {
    if checksum.is_empty() {
        return RoleName::from(role);
    }
    RoleName::new(format!("{role}.{}", hex::encode(checksum)))
}
