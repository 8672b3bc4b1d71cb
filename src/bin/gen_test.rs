//! Synthetic transcript generator for stress testing chatsift.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [seed]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt 42
//!
//! The output mixes both header shapes, two- and four-digit years, multi-line
//! messages, blank lines, impossible dates and preamble text, with a few
//! keywords (`pix`, `boleto`, `reunião`) sprinkled in, some of them misspelled.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const AUTHORS: &[&str] = &[
    "Ana",
    "Bob",
    "Carla Souza",
    "+55 11 91234-5678",
    "Иван",
    "村上",
    "🔥Fire🔥",
    "Dr. Who: The Doctor",
];

const FILLER: &[&str] = &[
    "ok",
    "bom dia pessoal",
    "alguém viu o documento?",
    "vou ver e te aviso",
    "kkkkkkk",
    "Привет, как дела?",
    "see you at 10:30",
    "link: https://example.com/a?b=c",
    "<Media omitted>",
    "😂😂😂",
];

/// Exact spellings first, then near misses for fuzzy matching.
const KEYWORDS: &[&str] = &["pix", "boleto", "reunião", "bolet0", "reuniao", "piks"];

const GARBAGE: &[&str] = &[
    "-------------------------------------------",
    "[15.01.24, 10:30:45] Alice: other export style",
    "12/31/2024 10:00 - Dan: month-first date",
    "31/02/2024 10:00 - Eve: impossible date",
    "1/1/202 10:00 - Fay: three-digit year",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_chat.txt", String::as_str);
    let seed: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(42);

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Seed:     {}", seed);
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer
    let mut rng = StdRng::seed_from_u64(seed);

    let start = Instant::now();
    let mut bytes_written: usize = 0;

    let preamble = "Messages and calls are end-to-end encrypted.\n\n";
    writer.write_all(preamble.as_bytes())?;
    bytes_written += preamble.len();

    for i in 0..count {
        let block = generate_message(&mut rng, i);
        writer.write_all(block.as_bytes())?;
        bytes_written += block.len();

        if i % 1000 == 500 {
            let garbage = format!("{}\n", GARBAGE[rng.gen_range(0..GARBAGE.len())]);
            writer.write_all(garbage.as_bytes())?;
            bytes_written += garbage.len();
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

/// One header line plus optional continuation and blank lines.
fn generate_message(rng: &mut impl Rng, index: usize) -> String {
    let day = index / 1440 % 28 + 1;
    let month = index / (1440 * 28) % 12 + 1;
    let hour = index / 60 % 24;
    let minute = index % 60;

    let header = match index % 4 {
        0 => format!("{day:02}/{month:02}/2024 {hour:02}:{minute:02} -"),
        1 => format!("{day:02}/{month:02}/2024, {hour:02}:{minute:02} -"),
        2 => format!("{day}/{month}/24 {hour}:{minute:02} -"),
        _ => format!("{day}/{month}/24, {hour}:{minute:02} -"),
    };

    let author = AUTHORS.choose(rng).copied().unwrap_or("Ana");
    let mut text = FILLER.choose(rng).copied().unwrap_or("ok").to_string();
    if rng.gen_bool(0.1) {
        let keyword = KEYWORDS.choose(rng).copied().unwrap_or("pix");
        text.push_str(&format!(" mandei o {keyword} ontem"));
    }

    let mut block = format!("{header} {author}: {text}\n");

    // Continuation lines
    if index % 7 == 3 {
        for line in 0..rng.gen_range(1..=3) {
            block.push_str(&format!("  linha {} da mensagem {}\n", line + 2, index));
        }
    }
    if index % 11 == 0 {
        block.push('\n');
    }
    block
}
