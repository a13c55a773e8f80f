//! Testing Hexview's public API
use hexview::{prelude::*, sink::Capture};
use rand::random;

const SEPARATOR: &str = "------+------------------------------------------------\r\n";

fn capture() -> (Emitter<Capture>, Capture) {
    let capture = Capture::default();
    (Emitter::new("integration", capture.clone()), capture)
}

#[test]
fn hv_print_labels_the_span() -> Result<()> {
    let (hv, capture) = capture();
    let line = line!() + 1;
    hv_print!(hv, [0x41u8, 0x00])?;
    let text = capture.text();
    assert!(text.starts_with("\r\n[  Hexview  ]\r\ntarget  [0x41u8, 0x00]\r\n"));
    assert!(text.contains(&format!("file    {}\r\n", file!())));
    assert!(text.contains(&format!("in      hv_print_labels_the_span -> L{line}\r\n")));
    assert!(text.contains("len     2\r\n"));
    assert!(text.contains(" 0000 : 41 00"));
    assert!(text.contains("A.\r\n"));
    assert!(!text.contains("note"));
    Ok(())
}

#[test]
fn hv_printn_adds_a_note() -> Result<()> {
    let (hv, capture) = capture();
    let frame = b"\x7eHDLC\x7e".to_vec();
    hv_printn!(hv, frame, "rx frame")?;
    let text = capture.text();
    assert!(text.contains("target  frame\r\n"));
    assert!(text.contains("len     6\r\nnote    rx frame\r\n"));
    assert!(text.contains("~HDLC~\r\n"));
    Ok(())
}

#[test]
fn slices_and_strings() -> Result<()> {
    let (hv, capture) = capture();
    let words = "hello";
    hv_print!(hv, words)?;
    hv_print!(hv, &words.as_bytes()[1..])?;
    let text = capture.text();
    assert!(text.contains("hello\r\n"));
    assert!(text.contains("ello\r\n"));
    Ok(())
}

#[test]
fn every_row_is_the_same_width() -> Result<()> {
    let (hv, capture) = capture();
    let span: Vec<u8> = (0..random::<u8>() as usize + 17).map(|_| b'#').collect();
    hv.render(&Request::new("span", call_site!()), &span)?;
    let text = capture.text();
    let rows: Vec<&str> = text
        .split("\r\n")
        .filter(|line| line.starts_with(' ') && line.contains(" : "))
        .collect();
    assert_eq!((span.len() + 15) / 16, rows.len());
    for row in rows {
        let ascii = row.find('#').unwrap();
        assert_eq!(62, ascii, "{row:?}");
    }
    assert!(text.ends_with(SEPARATOR));
    Ok(())
}

#[test]
fn colored_through_a_closure() -> Result<()> {
    let capture = Capture::default();
    let hv = Emitter::new("integration", capture.clone())
        .color(|byte: u8| if byte == 0 { Color::Red } else { Color::Green });
    hv.render(&Request::new("span", CallSite::default()), &[0, 1])?;
    let text = capture.text();
    assert!(text.contains("\x1b[31;1m 00\x1b[0m\x1b[32;1m 01\x1b[0m"));
    assert!(text.contains("\x1b[31;1m.\x1b[0m\x1b[32;1m.\x1b[0m\r\n"));
    Ok(())
}

#[test]
fn live_memory() -> Result<()> {
    let (hv, capture) = capture();
    let value: u32 = 0xdead_beef;
    let start = &value as *const u32 as *const u8;
    // SAFETY: `value` is four initialized bytes that outlive the call
    unsafe { hv.render_raw(&Request::new("value", call_site!()), start, 4)? };
    let text = capture.text();
    let expected: Vec<String> = value.to_ne_bytes().iter().map(|b| format!(" {b:02x}")).collect();
    assert!(text.contains(&format!(" 0000 :{}", expected.concat())));
    assert!(text.contains(&format!("start   {start:p}\r\n")));
    Ok(())
}

#[test]
fn reused_emitter() -> Result<()> {
    let (hv, capture) = capture();
    let span: Vec<u8> = (0..0x80).map(|_| random()).collect();
    for _ in 0..3 {
        hv_print!(hv, span)?;
    }
    let text = capture.text();
    let tables: Vec<&str> = text.split("\r\n[  Hexview  ]").skip(1).collect();
    assert_eq!(3, tables.len());
    // One call site, one span: the tables match byte for byte
    assert!(tables.windows(2).all(|pair| pair[0] == pair[1]));
    Ok(())
}
