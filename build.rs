use std::{env, fs, path::PathBuf};

const FONT_SOURCE: &str = "src/hankaku.txt";
const GLYPH_WIDTH: usize = 8;
const GLYPH_HEIGHT: usize = 16;
const GLYPH_COUNT: usize = 256;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={FONT_SOURCE}");

    let source = fs::read_to_string(FONT_SOURCE).expect("Could not read the font source");
    let font = build_font(&source);

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is not set"));
    fs::write(out_dir.join("hankaku.bin"), font).expect("Could not write hankaku.bin");
}

/// Turns the textual font description into the raw glyph table.
///
/// Every glyph is a header line (`0x41 'A'`) followed by 16 rows of 8 pixels, `.` being unset
/// and `@` (or `*`) set. The table always has a slot for all 256 codes, anything missing is blank.
fn build_font(source: &str) -> Vec<u8> {
    let mut glyphs: Vec<Option<[u8; GLYPH_HEIGHT]>> = vec![None; GLYPH_COUNT];
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    while let Some((line_number, header)) = lines.next() {
        let code = parse_header(line_number, header);
        if glyphs[code as usize].is_some() {
            panic!("{FONT_SOURCE}:{line_number}: glyph {code:#04x} is defined twice");
        }
        let mut glyph = [0u8; GLYPH_HEIGHT];
        for row in glyph.iter_mut() {
            let (line_number, line) = lines.next().unwrap_or_else(|| {
                panic!("{FONT_SOURCE}: glyph {code:#04x} ends before its {GLYPH_HEIGHT} rows")
            });
            *row = parse_row(line_number, line);
        }
        glyphs[code as usize] = Some(glyph);
    }

    glyphs
        .iter()
        .flat_map(|glyph| glyph.unwrap_or_default())
        .collect()
}

fn parse_header(line_number: usize, line: &str) -> u8 {
    let code = line
        .strip_prefix("0x")
        .and_then(|rest| rest.get(..2))
        .and_then(|digits| u8::from_str_radix(digits, 16).ok());
    match code {
        Some(code) => code,
        None => panic!("{FONT_SOURCE}:{line_number}: expected a glyph header like `0x41 'A'`, found `{line}`"),
    }
}

fn parse_row(line_number: usize, line: &str) -> u8 {
    if line.len() != GLYPH_WIDTH {
        panic!("{FONT_SOURCE}:{line_number}: rows must be exactly {GLYPH_WIDTH} pixels wide, found `{line}`");
    }
    // The left-most pixel ends up in the most significant bit, which is what the renderers expect.
    line.chars().fold(0u8, |row, pixel| match pixel {
        '.' => row << 1,
        '@' | '*' => (row << 1) | 1,
        _ => panic!("{FONT_SOURCE}:{line_number}: unexpected pixel `{pixel}`"),
    })
}
