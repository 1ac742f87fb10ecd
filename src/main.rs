// The bin only mounts the app; every other dependency is the library's.
#![allow(unused_crate_dependencies)]

use word_network::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
