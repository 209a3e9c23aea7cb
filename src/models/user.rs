/// A registered account.
///
/// The password is kept as plaintext, exactly as submitted at registration.
/// Nothing in this crate hashes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub f_name: String,
    pub l_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub f_name: String,
    pub l_name: String,
    pub email: String,
    pub password: String,
}
