// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A library to extract a dominant color palette from an image.
//!
//! The image's pixels are downsampled into a set of sufficiently opaque RGB
//! samples, the samples are partitioned into a requested number of clusters
//! with an iterative K-means loop, and the cluster mean colors are returned
//! ranked by how many samples each cluster covers.
//!
//! ```no_run
//! use dominance::{image::io::Reader as ImageReader, PaletteBuilder};
//!
//! let img = ImageReader::open("photo.jpg").unwrap().decode().unwrap();
//! let palette = PaletteBuilder::from_image(img.to_rgba8()).generate();
//!
//! for swatch in palette.swatches() {
//!     println!("{} covers {} samples", swatch.hex(), swatch.population());
//! }
//! ```
//!
//! Centroid initialization is randomized. For reproducible palettes, pass a
//! seeded generator to [`PaletteBuilder::generate_with_rng`].

mod filter;
mod kmeans;
mod sampler;
mod swatch;

pub const DEFAULT_CLUSTER_COUNT: usize = 5;
pub const DEFAULT_MAX_ITERATIONS: usize = 10;
pub const DEFAULT_SAMPLE_STEP: usize = 4;
pub const DEFAULT_RESIZE_DIMENSION: u32 = 320;

pub use crate::{
    filter::Filter,
    kmeans::KmeansClusterer,
    sampler::{collect_samples, ALPHA_THRESHOLD},
    swatch::Swatch,
};
pub use image;
pub use palette;

use image::{imageops, ImageBuffer, Pixel};
use log::debug;
use palette::IntoColor;
use rand::Rng;

/// A dominant-color palette extracted from an image, ordered by descending
/// cluster population.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    swatches: Vec<Swatch>,
}

pub struct PaletteBuilder<P>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    image: ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>,
    cluster_count: usize,
    max_iterations: usize,
    sample_step: usize,
    resize_dimension: u32,
    filters: Vec<Box<dyn Filter>>,
}

impl Palette {
    pub fn from_image<P>(image: ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>) -> PaletteBuilder<P>
    where
        P: Pixel<Subpixel = u8> + 'static,
    {
        PaletteBuilder::from_image(image)
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The ranked colors without their populations.
    pub fn colors(&self) -> Vec<(u8, u8, u8)> {
        self.swatches.iter().map(|swatch| swatch.rgb()).collect()
    }

    /// The color covering the largest share of the sampled pixels, or `None`
    /// when no pixel survived sampling.
    pub fn dominant_color(&self) -> Option<(u8, u8, u8)> {
        self.swatches.first().map(|swatch| swatch.rgb())
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}

impl<P> PaletteBuilder<P>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    pub fn from_image(image: ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>) -> Self {
        Self {
            image,
            cluster_count: DEFAULT_CLUSTER_COUNT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            sample_step: DEFAULT_SAMPLE_STEP,
            resize_dimension: DEFAULT_RESIZE_DIMENSION,
            filters: Vec::new(),
        }
    }

    /// How many colors to extract. Any value is tolerated: 0 produces an
    /// empty palette and values beyond the image's color diversity produce
    /// duplicate colors with zero population. User interfaces typically
    /// constrain this to a small range such as 3 to 8.
    pub fn cluster_count(self, cluster_count: usize) -> Self {
        Self { cluster_count, ..self }
    }

    /// The iteration budget for the clustering loop. The loop exits early
    /// once no populated centroid moves between iterations.
    pub fn max_iterations(self, max_iterations: usize) -> Self {
        Self { max_iterations, ..self }
    }

    /// Sample every `sample_step`-th pixel. 0 is treated as 1.
    pub fn sample_step(self, sample_step: usize) -> Self {
        Self { sample_step, ..self }
    }

    /// Downscale the image before sampling so its longer side does not exceed
    /// this, preserving aspect ratio. 0 disables downscaling.
    pub fn resize_dimension(self, resize_dimension: u32) -> Self {
        Self {
            resize_dimension,
            ..self
        }
    }

    pub fn add_filter<F>(mut self, filter: F) -> Self
    where
        F: Filter + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn clear_filters(self) -> Self {
        Self {
            filters: Vec::new(),
            ..self
        }
    }

    /// Extract the palette using the thread-local random generator.
    pub fn generate(self) -> Palette {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Extract the palette drawing random centroids from the given source.
    /// Repeated runs with the same image, parameters and seed produce the
    /// same palette.
    pub fn generate_with_rng<R>(mut self, rng: &mut R) -> Palette
    where
        R: Rng,
    {
        self.scale_image_down();

        let (width, height) = self.image.dimensions();
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for pixel in self.image.pixels() {
            rgba.extend_from_slice(&pixel.to_rgba().0);
        }

        let mut samples = collect_samples(&rgba, self.sample_step);
        if !self.filters.is_empty() {
            samples.retain(|&rgb| !self.should_ignore_color(rgb));
        }

        debug!("{} samples from a {}x{} image", samples.len(), width, height);

        let swatches =
            KmeansClusterer::new(self.cluster_count, self.max_iterations, rng).cluster(&samples);

        Palette { swatches }
    }

    fn should_ignore_color(&self, rgb: (u8, u8, u8)) -> bool {
        let hsl = rgb_to_hsl(rgb);
        self.filters.iter().any(|filter| !filter.is_allowed(rgb, hsl))
    }

    fn scale_image_down(&mut self)
    where
        <P as Pixel>::Subpixel: 'static,
    {
        let (width, height) = self.image.dimensions();
        let longer_side = width.max(height);

        if self.resize_dimension == 0 || longer_side <= self.resize_dimension {
            return;
        }

        let scale = self.resize_dimension as f32 / longer_side as f32;
        let scaled_width = ((width as f32 * scale).round() as u32).max(1);
        let scaled_height = ((height as f32 * scale).round() as u32).max(1);

        self.image = imageops::resize(
            &self.image,
            scaled_width,
            scaled_height,
            imageops::FilterType::Nearest,
        );
    }
}

fn rgb_to_hsl(rgb: (u8, u8, u8)) -> (f32, f32, f32) {
    let raw = palette::Srgb::from_components(rgb);
    let raw_float: palette::Srgb<f32> = raw.into_format();
    let hsl: palette::Hsl = raw_float.into_color();
    let (h, s, l) = hsl.into_components();

    (h.to_positive_degrees(), s, l)
}
