//! Lucky Lots entry point
//!
//! The web build is driven from JavaScript through `lucky_lots::web`. The
//! native build runs one draw per preset game against an in-memory ledger.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lucky_lots::persistence::MemoryStore;
    use lucky_lots::{DrawEngine, FortuneRitual, GameConfig, HistoryLedger, platform, ui};

    env_logger::init();
    log::info!("Lucky Lots (native) starting...");
    log::info!("Native mode has no page - run with `trunk serve` for the web version");

    let mut engine = DrawEngine::from_entropy();
    let mut history = HistoryLedger::load(MemoryStore::new());

    for game in GameConfig::presets() {
        match engine.draw_game(&game) {
            Ok(result) => {
                println!("{:>14}: {}", game.name, ui::format_result(&result));
                history.record(game.name.as_str(), &result, platform::now_ms());
            }
            Err(e) => log::error!("{} draw failed: {}", game.name, e),
        }
    }

    let mut ritual = FortuneRitual::new();
    ritual.press();
    let poem = loop {
        if let Some(poem) = ritual.tick(engine.rng_mut()) {
            break *poem;
        }
    };
    println!("\n{}", poem.title);
    for line in poem.lines {
        println!("  {}", line);
    }
    println!("{}", poem.meaning);

    log::info!("{} draws recorded", history.len());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is lucky_lots::web::start, this is just to satisfy the compiler
}
