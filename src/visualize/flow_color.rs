extern crate image as image_rs;

use image_rs::{Rgb,RgbImage};
use crate::image::flow_field::FlowField;
use crate::float;

pub const HUE_RANGE: f32 = 180.0;

// the channels hold (hue, saturation, value)
pub fn flow_to_hsv(flow: &FlowField) -> RgbImage {
    let max_norm = flow.max_norm();
    let mut hsv = RgbImage::new(flow.width() as u32, flow.height() as u32);

    for (x, y, pixel) in hsv.enumerate_pixels_mut() {
        let (fx, fy) = flow.vector(y as usize, x as usize);

        let mut angle = fy.atan2(fx);
        if angle < 0.0 {
            angle += 2.0*float::consts::PI as f32;
        }
        angle /= 2.0*float::consts::PI as f32;
        let hue = match (HUE_RANGE*angle) as u8 {
            h if h as f32 >= HUE_RANGE => 0,
            h => h
        };

        let norm = match max_norm > 0.0 {
            true => (fx*fx + fy*fy).sqrt()/max_norm,
            false => 0.0
        };
        let saturation = (255.0*norm) as u8;

        *pixel = Rgb([hue, saturation, 255]);
    }

    hsv
}

pub fn hsv_to_rgb(hue: u8, saturation: u8, value: u8) -> Rgb<u8> {
    let h = (hue as f32*360.0/HUE_RANGE) % 360.0;
    let s = saturation as f32/255.0;
    let v = value as f32/255.0;

    let c = v*s;
    let x = c*(1.0 - ((h/60.0) % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match (h/60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x)
    };
    let to_u8 = |channel: f32| ((channel + m)*255.0).round().clamp(0.0, 255.0) as u8;
    Rgb([to_u8(r), to_u8(g), to_u8(b)])
}

pub fn hsv_image_to_rgb(hsv: &RgbImage) -> RgbImage {
    let mut rgb = RgbImage::new(hsv.width(), hsv.height());
    for (x, y, pixel) in hsv.enumerate_pixels() {
        let Rgb([h, s, v]) = *pixel;
        rgb.put_pixel(x, y, hsv_to_rgb(h, s, v));
    }
    rgb
}

pub fn flow_to_rgb(flow: &FlowField) -> RgbImage {
    hsv_image_to_rgb(&flow_to_hsv(flow))
}
