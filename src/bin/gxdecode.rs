// Decodes a file of GX-700 patch messages and prints what it finds.

use std::env;

use gxpatch::{
    assemble, decode_with, message_count, read_file, split_messages, PatchMessage, SectionRecord,
    UnmappedCollector,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("usage: gxdecode infile");
        std::process::exit(1);
    }

    let input_file = &args[1];
    let buffer = match read_file(input_file) {
        Some(buffer) => buffer,
        None => {
            eprintln!("Unable to read {}", input_file);
            std::process::exit(1);
        }
    };

    let count = message_count(&buffer);
    let collector = UnmappedCollector::new();
    let mut decoded: Vec<PatchMessage> = Vec::new();

    for (index, data) in split_messages(&buffer).iter().enumerate() {
        print!("Message {} of {}: ", index + 1, count);
        match decode_with(data, &collector) {
            Ok(message) => {
                println!("{}", message.envelope);
                print_record(&message.record);
                decoded.push(message);
            }
            Err(e) => println!("Error in message: {}", e),
        }
        println!("MD5 digest: {:x}", md5::compute(data));
        println!();
    }

    for patch in assemble(decoded) {
        println!("Patch {}: {} ({} of 14 messages)",
            patch.number,
            patch.name().unwrap_or("<no header>"),
            14 - patch.missing().len());
    }

    for note in collector.into_notes() {
        println!("{}", note);
    }
}

fn print_record(record: &SectionRecord) {
    match record {
        SectionRecord::Header(header) => println!("  Patch name: {}", header.name),
        SectionRecord::Disabled(_) => {},
        SectionRecord::Modulation(m) => println!("  {}: {:?}", m.kind_name(), m),
        SectionRecord::Wah(w) => println!("  {}: {:?}", w.mode_name(), w),
        SectionRecord::Reverb(r) => println!("  {} {:.1} seconds: {:?}", r.kind, r.time_seconds(), r),
        other => println!("  {:?}", other),
    }
}
