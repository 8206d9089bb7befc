//! Print a fresh owner credential and an UPDATE for an existing row

use miami_admin::{init_tracing, password_reset_report};
use miami_auth::PasswordService;
use miami_core::models::SeedUser;

fn main() {
    init_tracing();

    let user = SeedUser::superadmin();
    let password_hash = PasswordService::new().hash_password(&user.password);

    print!("{}", password_reset_report(&user, &password_hash));
}
