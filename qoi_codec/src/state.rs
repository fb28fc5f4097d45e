use crate::meta::QOI_CACHE_LEN;
use crate::pixel::Pixel;

// A collection of stateful properties and methods maintained during decoding
// or encoding of an image. A fresh `State` is created for every image.
#[derive(Clone, Debug)]
pub struct State {
  // A cache of previously seen pixels, indexed by their hash value.
  pub cache: [Pixel; QOI_CACHE_LEN],
  // The previously decoded/encoded pixel.
  pub prev_pixel: Pixel,
  // Length of the current run (Op::Run) (if any).
  pub run_count: u8,
}

impl State {
  pub fn new() -> Self {
    Self {
      cache: [Pixel::ZERO; QOI_CACHE_LEN],
      prev_pixel: Pixel::START,
      run_count: 0,
    }
  }

  // Inserts the given pixel into the cache. Overwrites any pixel that was
  // previously cached at the computed index.
  pub fn cache_insert(&mut self, pixel: Pixel) {
    self.cache[pixel.hash() as usize] = pixel;
  }

  // Checks if the given pixel matches the cached pixel at the computed index
  // and returns the index. If there is no match, the given pixel is inserted,
  // overwriting the pixel that was previously cached, and the index is not
  // returned.
  pub fn cache_match_or_replace(&mut self, pixel: Pixel) -> Option<u8> {
    let index = pixel.hash();
    let slot = &mut self.cache[index as usize];

    if *slot == pixel {
      return Some(index);
    }

    *slot = pixel;

    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_state() {
    let state = State::new();

    assert!(state.cache.iter().all(|pixel| *pixel == Pixel::ZERO));
    assert_eq!(state.prev_pixel, Pixel::new(0, 0, 0, 255));
    assert_eq!(state.run_count, 0);
  }

  #[test]
  fn test_cache_match_or_replace() {
    let mut state = State::new();
    let pixel = Pixel::new(101, 102, 103, 104);

    assert_eq!(state.cache_match_or_replace(pixel), None);
    assert_eq!(state.cache[54], pixel);
    assert_eq!(state.cache_match_or_replace(pixel), Some(54));
  }

  #[test]
  fn test_colliding_pixels_evict_each_other() {
    let mut state = State::new();
    let a = Pixel::new(1, 0, 0, 0);
    // Adding 64 to red adds 192 to the hash sum, a multiple of 64.
    let b = Pixel::new(65, 0, 0, 0);

    assert_eq!(a.hash(), b.hash());

    state.cache_insert(a);
    assert_eq!(state.cache_match_or_replace(b), None);
    assert_eq!(state.cache_match_or_replace(a), None);
    assert_eq!(state.cache[a.hash() as usize], a);
  }
}
