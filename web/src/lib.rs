use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod utils;

/// Options read from the page's location hash, e.g. `#--seed=42&-vv`.
#[derive(Parser, Debug)]
#[command(version, about = "Number guessing game in the browser", long_about = None)]
struct Args {
    /// Browser console log level, raised with -v and lowered with -q
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

fn parse_hash_args(hash: &str) -> Result<Args, clap::Error> {
    Args::try_parse_from(hash.split(['#', '&']))
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = parse_hash_args(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("seed: {:?}", args.game.seed);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
