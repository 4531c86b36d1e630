//! Round flow around the canvas: pick a word, capture a drawing, hand it to the classifier.

pub mod round;
pub mod words;
