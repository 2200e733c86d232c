use std::path::Path;
use std::{env, io};

mod offsets {
    use std::io::{self, BufWriter, Write};
    use std::{fs, path::Path};

    use movelaw_base::geometry::{self, Delta};

    fn print_offsets<W: Write>(w: &mut W, name: &str, offsets: &[Delta]) -> io::Result<()> {
        writeln!(w, "const {}: [Offset; {}] = [", name, offsets.len())?;
        for (d_row, d_col) in offsets {
            writeln!(w, "    ({}, {}),", d_row, d_col)?;
        }
        writeln!(w, "];")?;
        Ok(())
    }

    pub fn gen(out_path: &Path) -> io::Result<()> {
        let f = fs::File::create(out_path)?;
        let mut w = BufWriter::new(&f);

        let diag = geometry::slide_offsets(&geometry::DIAG_DIRS);
        let line = geometry::slide_offsets(&geometry::LINE_DIRS);
        let queen: Vec<Delta> = diag.iter().chain(line.iter()).copied().collect();

        print_offsets(&mut w, "KNIGHT", &geometry::KNIGHT_DELTAS)?;
        writeln!(&mut w)?;
        print_offsets(&mut w, "KING", &geometry::KING_DELTAS)?;
        writeln!(&mut w)?;
        print_offsets(&mut w, "BISHOP", &diag)?;
        writeln!(&mut w)?;
        print_offsets(&mut w, "ROOK", &line)?;
        writeln!(&mut w)?;
        print_offsets(&mut w, "QUEEN", &queen)?;

        Ok(())
    }
}

mod between {
    use std::io::{self, BufWriter, Write};
    use std::{fs, path::Path};

    use movelaw_base::bitboard::Bitboard;
    use movelaw_base::geometry;
    use movelaw_base::types::Square;

    fn strict(src: Square, dst: Square) -> Bitboard {
        let delta = (
            dst.row() as isize - src.row() as isize,
            dst.col() as isize - src.col() as isize,
        );
        let mut res = Bitboard::EMPTY;
        let (d_row, d_col) = match geometry::unit_step(delta) {
            Some(step) => step,
            None => return res,
        };
        let mut p = src;
        while let Some(np) = p.shift(d_row, d_col) {
            if np == dst {
                break;
            }
            res.set(np);
            p = np;
        }
        res
    }

    pub fn gen(out_path: &Path) -> io::Result<()> {
        let f = fs::File::create(out_path)?;
        let mut w = BufWriter::new(&f);

        writeln!(w, "static BETWEEN: [[Bitboard; 64]; 64] = [")?;
        for src in Square::iter() {
            writeln!(w, "    /*{}*/ [", src)?;
            for dst in Square::iter() {
                writeln!(
                    w,
                    "        /*{}*/ bb(0x{:016x}),",
                    dst,
                    strict(src, dst).as_raw()
                )?;
            }
            writeln!(w, "    ],")?;
        }
        writeln!(w, "];")?;

        Ok(())
    }
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR").unwrap();

    offsets::gen(&Path::new(&out_dir).join("offsets.rs"))?;
    between::gen(&Path::new(&out_dir).join("between.rs"))?;

    Ok(())
}
