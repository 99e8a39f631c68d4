use std::env;
use std::fs;
use std::process;

use ricoh2a03::Nes;

struct Options {
    rom_path: String,
    steps: usize,
    verbose: bool,
}

fn parse_args() -> Options {
    let mut args = env::args().skip(1);
    let mut rom_path: Option<String> = None;
    let mut steps: usize = 10_000;
    let mut verbose = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-s" | "--steps" => {
                let val = args.next().unwrap_or_default();
                steps = val.parse().unwrap_or_else(|_| {
                    eprintln!("Invalid steps: {val}");
                    print_usage_and_exit();
                });
            }
            "-v" | "--verbose" => {
                verbose = true;
            }
            _ => {
                if rom_path.is_none() {
                    rom_path = Some(arg);
                } else {
                    eprintln!("Unexpected argument: {arg}");
                    print_usage_and_exit();
                }
            }
        }
    }

    let rom_path = rom_path.unwrap_or_else(|| {
        eprintln!("Missing ROM path.");
        print_usage_and_exit();
    });

    Options {
        rom_path,
        steps,
        verbose,
    }
}

fn print_usage_and_exit() -> ! {
    eprintln!("Usage: rom-runner <rom_path> [options]");
    eprintln!("Options:");
    eprintln!("  -s, --steps <count>    Instructions to run (default: 10000)");
    eprintln!("  -v, --verbose          Print final machine state");
    process::exit(2);
}

fn main() {
    env_logger::init();
    let opts = parse_args();

    let rom_data = fs::read(&opts.rom_path).unwrap_or_else(|err| {
        eprintln!("Failed to read ROM '{}': {err}", opts.rom_path);
        process::exit(2);
    });

    let mut nes = match Nes::from_ines(&rom_data) {
        Ok(nes) => nes,
        Err(err) => {
            eprintln!("ROM parse error: {err}");
            process::exit(2);
        }
    };
    if let Err(fault) = nes.reset() {
        eprintln!("Reset failed: {fault}");
        process::exit(1);
    }

    let mut executed = 0usize;
    while executed < opts.steps {
        match nes.step() {
            Ok(_) => executed += 1,
            Err(fault) => {
                eprintln!("CPU halted after {executed} instructions: {fault}");
                process::exit(1);
            }
        }
    }

    if opts.verbose {
        let cpu = &nes.cpu;
        println!(
            "PC:${:04X} SP:${:02X} A:${:02X} X:${:02X} Y:${:02X} P:{:08b} CYC:{}",
            cpu.program_counter,
            cpu.stack_pointer,
            cpu.register_a,
            cpu.register_x,
            cpu.register_y,
            cpu.status.bits(),
            cpu.cycles
        );
    }
    println!("OK ({executed} instructions)");
}
