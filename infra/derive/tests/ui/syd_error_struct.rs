use syd_derive::syd_error;

#[syd_error]
pub struct DemoError {
    message: String,
}

fn main() {}
