use std::env;
use std::f64;
use std::fmt::{Display, Write};
use std::fs;
use std::path::Path;

#[allow(dead_code)]
#[path = "src/config.rs"]
mod config;

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    gen_sine_table(out_dir);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/config.rs");
}

/// Q15 sine over 1.5 periods' worth of index space, truncated toward zero.
/// `precompute_sine` in src/fixed/tables.rs produces the same values at runtime.
fn gen_sine_table(out_dir: &Path) {
    let table: Vec<i16> = (0..config::SINE_TABLE_LEN)
        .map(|i| {
            let sample = f64::sin(2.0 * f64::consts::PI * i as f64 / config::FFT_SIZE as f64);
            (i16::MAX as f64 * sample) as i16
        })
        .collect();

    write_table(&out_dir.join("sine_table.rs"), &table);
}

fn write_table<T>(file_path: &Path, table: &[T])
where
    T: Display + NumericSuffix,
{
    let mut out = String::new();

    out.push('[');
    let mut first = true;
    for x in table {
        write!(out, "{}", x).unwrap();
        if first {
            first = false;
            // pin the element type so a mismatched table fails to compile
            out.push_str(T::SUFFIX);
        }
        out.push_str(",\n");
    }
    out.push(']');

    fs::write(file_path, out).unwrap();
}

trait NumericSuffix {
    const SUFFIX: &'static str;
}

impl NumericSuffix for i16 {
    const SUFFIX: &'static str = "i16";
}
