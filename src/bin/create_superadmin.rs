//! Print a fresh owner credential and the upsert that stores it
//!
//! Usage: cargo run --bin create_superadmin
//!
//! Touches neither the database nor any file; paste the printed SQL into a
//! console to apply it.

use miami_admin::{init_tracing, superadmin_report};
use miami_auth::PasswordService;
use miami_core::models::SeedUser;

fn main() {
    init_tracing();

    let user = SeedUser::superadmin();
    let password_hash = PasswordService::new().hash_password(&user.password);

    print!("{}", superadmin_report(&user, &password_hash));
}
