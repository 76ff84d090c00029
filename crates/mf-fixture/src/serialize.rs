//! Line format read by the encrypted matmul benchmark.
//!
//! ```text
//! <slot_count> <nb_inputs> <nb_outputs>
//! A[i][] <cipher> <signed> <row i of A>      one line per row of A
//! B[][j] <cipher> <signed> <column j of B>   one line per column of B
//! C[i][] <cipher> <row i of C>               one line per row of C
//! ```
//!
//! C lines carry no signed flag.

use std::io::{self, Write};

use crate::fixture::Fixture;

fn flag(b: bool) -> u8 {
    u8::from(b)
}

fn write_values<W: Write>(w: &mut W, values: impl IntoIterator<Item = i64>) -> io::Result<()> {
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            w.write_all(b" ")?;
        }
        write!(w, "{}", v)?;
    }
    writeln!(w)
}

/// Write `fixture` to `w` in benchmark line format.
pub fn write_fixture<W: Write>(fixture: &Fixture, w: &mut W) -> io::Result<()> {
    let cipher = flag(fixture.is_cipher);
    let signed = flag(fixture.is_signed);

    writeln!(
        w,
        "{} {} {}",
        fixture.slot_count,
        fixture.nb_inputs(),
        fixture.nb_outputs()
    )?;

    for i in 0..fixture.a.rows() {
        write!(w, "A[{}][] {} {} ", i, cipher, signed)?;
        write_values(w, fixture.a.row(i).iter().copied())?;
    }

    // B is encoded column by column.
    for j in 0..fixture.b.cols() {
        write!(w, "B[][{}] {} {} ", j, cipher, signed)?;
        write_values(w, fixture.b.col(j))?;
    }

    for i in 0..fixture.c.rows() {
        write!(w, "C[{}][] {} ", i, cipher)?;
        write_values(w, fixture.c.row(i).iter().copied())?;
    }

    Ok(())
}

/// Render `fixture` into a string.
pub fn render_fixture(fixture: &Fixture) -> String {
    let mut buf = Vec::new();
    write_fixture(fixture, &mut buf).expect("writing to a Vec<u8> cannot fail");
    String::from_utf8(buf).expect("fixture output is ASCII")
}
