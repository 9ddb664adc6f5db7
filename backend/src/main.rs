#[macro_use] extern crate rocket;

use dotenv::dotenv;

#[launch]
fn rocket() -> _ {
    dotenv().ok();
    notes_backend::build()
}
