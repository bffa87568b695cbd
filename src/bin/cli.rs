//! This is the command line tool that prints the code table of a Golomb-Rice
//! or Exponential-Golomb encoder over a range of integers.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{Arg, Command};
use ::golomb::coding::{exp_golomb, golomb};
use ::golomb::error::CodeResult;
use ::golomb::mapping::SignMapping;
use ::golomb::Codeword;

/// Encode a single row of the table: map the value if the mode is signed,
/// then run the selected encoder. Returns the mapped value and the code word.
fn encode_one(
    val: i32,
    signed: bool,
    use_exp: bool,
    mapping: SignMapping,
    m: u64,
    k: u32,
) -> CodeResult<(u64, Codeword)> {
    let mapped = if signed { mapping.apply(val) } else { val as u64 };
    let code = if use_exp {
        exp_golomb::encode(mapped, k)?
    } else {
        golomb::encode(mapped, m)?
    };
    Ok((mapped, code))
}

fn main() {
    let matches = Command::new("golomb")
        .version("1.x")
        .about("Prints Golomb-Rice and Exponential-Golomb code tables")
        .arg(
            Arg::new("MODE")
                .help("The encoding mode")
                .value_parser(["sg", "ug", "seg", "ueg"])
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("modulus")
                .short('m')
                .long("modulus")
                .value_name("val")
                .help("The modulus M used by the sg and ug modes")
                .value_parser(clap::value_parser!(u64))
                .default_value("1")
                .num_args(1),
        )
        .arg(
            Arg::new("order")
                .short('k')
                .long("order")
                .value_name("val")
                .help("The order K used by the seg and ueg modes")
                .value_parser(clap::value_parser!(u32))
                .default_value("0")
                .num_args(1),
        )
        .arg(
            Arg::new("range")
                .short('r')
                .long("range")
                .value_names(["start", "end"])
                .help("The range of displayed values")
                .value_parser(clap::value_parser!(i32))
                .allow_negative_numbers(true)
                .num_args(2),
        )
        .arg(
            Arg::new("mapping")
                .long("mapping")
                .value_name("name")
                .help("The mapping from signed to unsigned values")
                .value_parser(["normal", "jls-regular", "jls-special"])
                .default_value("normal")
                .num_args(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let mode = matches.get_one::<String>("MODE").unwrap();
    let signed = mode == "sg" || mode == "seg";
    let use_exp = mode == "seg" || mode == "ueg";

    let m = *matches.get_one::<u64>("modulus").unwrap();
    let k = *matches.get_one::<u32>("order").unwrap();
    let mapping_name = matches.get_one::<String>("mapping").unwrap();
    let mapping = SignMapping::from_name(mapping_name).unwrap();

    // The unsigned modes display the non-negative half of the range.
    let (start, end) = match matches.get_many::<i32>("range") {
        Some(vals) => {
            let vals: Vec<i32> = vals.copied().collect();
            (vals[0], vals[1])
        }
        None if signed => (-16, 16),
        None => (0, 16),
    };

    if !signed && (start < 0 || end < 0) {
        log::error!("The range of values must be equal or more than zero.");
        std::process::exit(1);
    }

    for val in start..=end {
        match encode_one(val, signed, use_exp, mapping, m, k) {
            Ok((mapped, code)) => {
                println!("{:>4} {:>4} {:>4} {}", val, mapped, code.len, code);
            }
            Err(err) => {
                log::error!("Can't encode {}: {}", val, err);
                std::process::exit(1);
            }
        }
    }
}
