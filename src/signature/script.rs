//! Text form of pointer input, so signatures can be captured from the CLI.
//!
//! ```text
//! down 10,40; move 30,20; move 60,45; up
//! resize 300,100@2
//! clear
//! ```
//!
//! A stroke can also be written as a plain list of points
//! (`"10,40 30,20 60,45"`): press on the first, drag through the rest,
//! release on the last.

use crate::errors::{AppError, AppResult};
use crate::signature::pad::{Point, PointerEvent, SignaturePad};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PadCommand {
    Pointer(PointerEvent),
    Resize {
        width: f32,
        height: f32,
        ratio: Option<f32>,
    },
    Clear,
}

pub fn parse_script(text: &str) -> AppResult<Vec<PadCommand>> {
    text.split([';', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.starts_with('#'))
        .map(parse_command)
        .collect()
}

fn parse_command(line: &str) -> AppResult<PadCommand> {
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((v, a)) => (v, a.trim()),
        None => (line, ""),
    };

    let cmd = match verb.to_lowercase().as_str() {
        "down" => PadCommand::Pointer(PointerEvent::Down(parse_point(arg)?)),
        "move" => PadCommand::Pointer(PointerEvent::Move(parse_point(arg)?)),
        "up" => PadCommand::Pointer(PointerEvent::Up),
        "leave" => PadCommand::Pointer(PointerEvent::Leave),
        "clear" => PadCommand::Clear,
        "resize" => {
            let (size, ratio) = match arg.split_once('@') {
                Some((s, r)) => (s, Some(parse_number(r)?)),
                None => (arg, None),
            };
            let p = parse_point(size)?;
            PadCommand::Resize {
                width: p.x,
                height: p.y,
                ratio,
            }
        }
        _ => return Err(AppError::InvalidPointer(line.to_string())),
    };
    Ok(cmd)
}

/// `"x,y x,y ..."` → press, drag, release.
pub fn parse_stroke(text: &str) -> AppResult<Vec<PadCommand>> {
    let points = text
        .split_whitespace()
        .map(parse_point)
        .collect::<AppResult<Vec<_>>>()?;

    let Some((first, rest)) = points.split_first() else {
        return Err(AppError::InvalidPointer("empty stroke".into()));
    };

    let mut out = vec![PadCommand::Pointer(PointerEvent::Down(*first))];
    if rest.is_empty() {
        // a single click still leaves a dot
        out.push(PadCommand::Pointer(PointerEvent::Move(*first)));
    }
    out.extend(rest.iter().map(|p| PadCommand::Pointer(PointerEvent::Move(*p))));
    out.push(PadCommand::Pointer(PointerEvent::Up));
    Ok(out)
}

fn parse_point(text: &str) -> AppResult<Point> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| AppError::InvalidPointer(text.to_string()))?;
    Ok(Point::new(parse_number(x)?, parse_number(y)?))
}

fn parse_number(text: &str) -> AppResult<f32> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::InvalidPointer(text.to_string()))
}

pub fn apply(pad: &mut SignaturePad, commands: &[PadCommand]) {
    for cmd in commands {
        match *cmd {
            PadCommand::Pointer(ev) => pad.handle(ev),
            PadCommand::Resize {
                width,
                height,
                ratio,
            } => {
                let r = ratio.unwrap_or_else(|| pad.pixel_ratio());
                pad.resize(width, height, r);
            }
            PadCommand::Clear => pad.clear(),
        }
    }
}
