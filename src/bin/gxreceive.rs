// Reads lines of input produced by ReceiveMIDI,
// filters out everything else but System Exclusive messages,
// and decodes the GX-700 patch messages among them.

use std::env;
use std::fs;
use std::io::{self, BufRead};

use log::debug;
use gxpatch::{decode_message, INITIATOR, TERMINATOR};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {  // read from standard input
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => process_line(&line),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
    }
    else if args.len() == 2 {  // read from input file
        let input_file = &args[1];
        match fs::read_to_string(input_file) {
            Ok(text) => text.lines().for_each(process_line),
            Err(e) => {
                eprintln!("Unable to read {}: {}", input_file, e);
                std::process::exit(1);
            }
        }
    }
    else {
        println!("usage: gxreceive [infile]");
        std::process::exit(1);
    }
}

fn process_line(line: &str) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.first() != Some(&"system-exclusive") {
        return;
    }

    let mut data: Vec<u8> = Vec::new();
    // ReceiveMIDI may or may not write the number-format keywords and the delimiters.
    for part in parts[1..].iter().filter(|p| !matches!(**p, "hex" | "dec")) {
        match u8::from_str_radix(part, 16) {
            Ok(b) => data.push(b),
            Err(e) => {
                eprintln!("Error in hex string: {}", e);
                return;
            }
        }
    }
    if data.first() != Some(&INITIATOR) {
        data.insert(0, INITIATOR);
    }
    if data.last() != Some(&TERMINATOR) {
        data.push(TERMINATOR);
    }
    debug!("data = {}", hex::encode_upper(&data));

    match decode_message(&data) {
        Ok(message) => println!("{}: {:?}", message.envelope, message.record),
        Err(e) => eprintln!("Error in message: {}", e),
    }
}
