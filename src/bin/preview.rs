//! Cue preview — plays each chess sound through the default output device,
//! or renders them to WAV files with `chess-sfx-preview wav [dir]`.

use std::time::Duration;

use chess_sfx::dsp::renderer;
use chess_sfx::{SoundEngine, SoundEvent};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("wav") => {
            let dir = args.next().unwrap_or_else(|| ".".to_string());
            write_wavs(&dir);
        }
        Some(other) => {
            eprintln!("unknown mode '{other}'; usage: chess-sfx-preview [wav [dir]]");
            std::process::exit(2);
        }
        None => play_live(),
    }
}

fn play_live() {
    let engine = SoundEngine::new();
    if !engine.has_output() {
        eprintln!("no output device; try `chess-sfx-preview wav <dir>` instead");
        std::process::exit(1);
    }

    for event in SoundEvent::ALL {
        println!("{}", event.as_tag());
        engine.play_event(event, None);
        std::thread::sleep(Duration::from_millis(900));
    }
    // Let the game-end arpeggio ring out
    std::thread::sleep(Duration::from_millis(500));
}

fn write_wavs(dir: &str) {
    for event in SoundEvent::ALL {
        let path = format!("{dir}/{}.wav", event.as_tag());
        match renderer::render_event_wav(event, 44100) {
            Ok(bytes) => match std::fs::write(&path, bytes) {
                Ok(()) => println!("wrote {path}"),
                Err(e) => eprintln!("failed to write {path}: {e}"),
            },
            Err(e) => eprintln!("failed to render {}: {e}", event.as_tag()),
        }
    }
}
