// SPDX-License-Identifier: MPL-2.0
//! Image decoding for album pages and header logos.

pub mod image;

pub use image::{half_placeholder, load_image, load_image_async, single_placeholder, ImageData};
