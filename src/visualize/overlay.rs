extern crate image as image_rs;

use image_rs::{Rgb,RgbImage};
use crate::numerics::pose::EgoMotion;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

// 5x7 bitmap rows, bit 4 is the leftmost column
fn glyph(c: char) -> [u8; 7] {
    match c {
        '0' => [0x0E,0x11,0x13,0x15,0x19,0x11,0x0E],
        '1' => [0x04,0x0C,0x04,0x04,0x04,0x04,0x0E],
        '2' => [0x0E,0x11,0x01,0x02,0x04,0x08,0x1F],
        '3' => [0x1F,0x02,0x04,0x02,0x01,0x11,0x0E],
        '4' => [0x02,0x06,0x0A,0x12,0x1F,0x02,0x02],
        '5' => [0x1F,0x10,0x1E,0x01,0x01,0x11,0x0E],
        '6' => [0x06,0x08,0x10,0x1E,0x11,0x11,0x0E],
        '7' => [0x1F,0x01,0x02,0x04,0x08,0x08,0x08],
        '8' => [0x0E,0x11,0x11,0x0E,0x11,0x11,0x0E],
        '9' => [0x0E,0x11,0x11,0x0F,0x01,0x02,0x0C],
        '-' => [0x00,0x00,0x00,0x1F,0x00,0x00,0x00],
        '+' => [0x00,0x04,0x04,0x1F,0x04,0x04,0x00],
        '.' => [0x00,0x00,0x00,0x00,0x00,0x0C,0x0C],
        ':' => [0x00,0x0C,0x0C,0x00,0x0C,0x0C,0x00],
        '/' => [0x00,0x01,0x02,0x04,0x08,0x10,0x00],
        'N' => [0x11,0x11,0x19,0x15,0x13,0x11,0x11],
        'R' => [0x1E,0x11,0x11,0x1E,0x14,0x12,0x11],
        'T' => [0x1F,0x04,0x04,0x04,0x04,0x04,0x04],
        'a' => [0x00,0x00,0x0E,0x01,0x0F,0x11,0x0F],
        'e' => [0x00,0x00,0x0E,0x11,0x1F,0x10,0x0E],
        'f' => [0x06,0x09,0x08,0x1C,0x08,0x08,0x08],
        'i' => [0x04,0x00,0x0C,0x04,0x04,0x04,0x0E],
        'l' => [0x0C,0x04,0x04,0x04,0x04,0x04,0x0E],
        'n' => [0x00,0x00,0x16,0x19,0x11,0x11,0x11],
        'o' => [0x00,0x00,0x0E,0x11,0x11,0x11,0x0E],
        'r' => [0x00,0x00,0x16,0x19,0x10,0x10,0x10],
        's' => [0x00,0x00,0x0E,0x10,0x0E,0x01,0x1E],
        't' => [0x08,0x08,0x1C,0x08,0x08,0x09,0x06],
        _ => [0x00; 7]
    }
}

pub fn draw_text(image: &mut RgbImage, x: u32, y: u32, text: &str, color: Rgb<u8>, scale: u32) -> () {
    let scale = scale.max(1);
    let top = y as i64 - (GLYPH_HEIGHT*scale) as i64;
    for (i, c) in text.chars().enumerate() {
        let left = x as i64 + (i as u32*GLYPH_ADVANCE*scale) as i64;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let px = left + (col*scale + dx) as i64;
                        let py = top + (row as u32*scale + dy) as i64;
                        if px >= 0 && py >= 0 && (px as u32) < image.width() && (py as u32) < image.height() {
                            image.put_pixel(px as u32, py as u32, color);
                        }
                    }
                }
            }
        }
    }
}

pub fn rotation_text(ego_motion: Option<&EgoMotion>) -> String {
    match ego_motion {
        Some(ego_motion) => {
            let r = ego_motion.rotation_vector();
            format!("Rotation: {:.6} {:.6} {:.6}", r[0], r[1], r[2])
        },
        None => "Rotation: n/a".to_string()
    }
}

pub fn translation_text(ego_motion: Option<&EgoMotion>) -> String {
    match ego_motion {
        Some(ego_motion) => {
            let t = ego_motion.translation;
            format!("Translation: {:.6} {:.6} {:.6}", t[0], t[1], t[2])
        },
        None => "Translation: n/a".to_string()
    }
}

pub fn draw_ego_motion_overlay(image: &mut RgbImage, ego_motion: Option<&EgoMotion>, color: Rgb<u8>, scale: u32) -> () {
    let line_height = 20*scale.max(1);
    draw_text(image, 10, line_height, &rotation_text(ego_motion), color, scale);
    draw_text(image, 10, 2*line_height, &translation_text(ego_motion), color, scale);
}
