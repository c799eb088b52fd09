//! Reads a line of Japanese text from the first CLI argument (or stdin when
//! no argument is given) and prints every extracted TIMEX tag, one per line.

use std::env;
use std::io::{self, Read};

use ja_timex::TimexParser;

fn read_input() -> io::Result<String> {
    if let Some(arg) = env::args().nth(1) {
        return Ok(arg);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end().to_string())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let input = read_input()?;
    let mut parser = TimexParser::new();
    let tags = parser.parse(&input);

    log::info!("extracted {} tag(s) from {} char(s) of input", tags.len(), input.chars().count());

    for tag in &tags {
        println!(
            "{}\t{}\t{}\t{:?}",
            tag.tid,
            tag.kind.as_str(),
            tag.value,
            tag.text
        );
    }

    Ok(())
}
