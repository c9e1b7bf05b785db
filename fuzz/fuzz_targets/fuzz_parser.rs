// Lame - A lexical front end for a Spin-like block language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Fuzz target for the Lame parser.
//!
//! This fuzzer assembles sources from random blocks and bodies and feeds
//! them to the parser to find crashes, panics, or infinite loops.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_parser
//!
//! Run for a specific duration:
//!   cargo +nightly fuzz run fuzz_parser -- -max_total_time=60

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

const BLOCKS: [&str; 6] = ["CON", "DAT", "OBJ", "PRI", "PUB", "VAR"];

#[derive(Arbitrary, Debug)]
struct FuzzBlock {
    keyword: u8,
    lines: Vec<(u8, String)>,
}

fuzz_target!(|blocks: Vec<FuzzBlock>| {
    let mut source = String::new();
    for block in &blocks {
        source.push_str(BLOCKS[block.keyword as usize % BLOCKS.len()]);
        source.push('\n');
        for (indent, line) in &block.lines {
            source.push_str(&" ".repeat(*indent as usize % 16));
            source.push_str(line);
            source.push('\n');
        }
    }

    // Should never panic, only return Ok or Err
    let _ = lame::parse_source(&source);
});
