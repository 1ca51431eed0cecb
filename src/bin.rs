// Copyright (C) 2021 Oren Ben-Kiki
//
// This program is free software: you can redistribute it and/or modify it under the terms of the
// GNU Affero General Public License as published by the Free Software Foundation, either version 3
// of the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without
// even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License along with this program.
// If not, see <https://www.gnu.org/licenses/>.

//! Generate Spirograph curves and other simple shapes as SVG files.

use spirograph::program::main as program_main;
use spirograph::Error;
use std::env::args;
use std::process::exit;

fn main() {
    env_logger::init();

    let flags: Vec<String> = args().collect();
    match program_main(&flags) {
        Ok(()) => {}
        Err(Error::Usage(error)) => error.exit(),
        Err(error) => {
            eprintln!("spirograph: {}", error);
            exit(1);
        }
    }
}
