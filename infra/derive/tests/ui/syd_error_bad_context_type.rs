use syd_derive::syd_error;

#[syd_error]
pub enum DemoError {
    #[error("IO error: {source}")]
    Io { source: std::io::Error, context: Option<String> },
}

fn main() {}
