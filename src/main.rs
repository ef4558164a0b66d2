use std::env;
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use dreadio::analysis;
use dreadio::presets::{self, SoundSpec};
use dreadio::render::engrave;
use dreadio::soundbook;
use dreadio::synth::SampleBuffer;

const DEFAULT_OUT_DIR: &str = "public/sounds";

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!(r#"Usage: dreadio [out_dir] [soundbook.json]"#);
        process::exit(1);
    }

    let out_dir = if args.len() > 1 { args[1].as_str() } else { DEFAULT_OUT_DIR };

    let specs: Vec<SoundSpec> = if args.len() > 2 {
        match soundbook::load(&args[2]) {
            Ok(specs) => specs,
            Err(msg) => {
                eprintln!("Failed to load soundbook {}: {}", &args[2], msg);
                process::exit(1);
            }
        }
    } else {
        presets::SOUNDBOOK.clone()
    };

    println!("Rendering {} sounds into {}", specs.len(), out_dir);

    // every synth owns its buffers and rng, so the batch renders in parallel
    let rendered: Vec<(SoundSpec, Result<SampleBuffer, String>)> = specs
        .par_iter()
        .map(|spec| {
            let mut rng = StdRng::from_entropy();
            (*spec, presets::render_spec(spec, &mut rng))
        })
        .collect();

    let mut failures = 0;
    for (spec, outcome) in rendered {
        let filename = format!("{}/{}.wav", out_dir, spec.name);
        let written = outcome.and_then(|signal| {
            let peak = analysis::peak(&signal);
            engrave::write_wav(&filename, &signal).map(|bytes| (bytes, peak))
        });
        match written {
            Ok((bytes, peak)) => {
                println!(
                    "Completed writing {} ({} bytes, peak {:.1} dBFS)",
                    filename,
                    bytes,
                    analysis::amp_to_db(peak.min(1f32))
                );
            }
            Err(msg) => {
                eprintln!("Failed writing {}: {}", filename, msg);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("{} of {} sounds failed", failures, specs.len());
        process::exit(1);
    }
    println!("All {} sounds rendered", specs.len());
}
