use tracing::{Level, error};

mod common;
mod contact;
mod hover;
mod nav;
mod notify;
mod page;
mod reveal;
mod scroll;
mod typing;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    if let Err(err) = page::start() {
        error!("failed to attach page behaviors: {err:#}");
    }
}
