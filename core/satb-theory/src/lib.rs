//! Pitch, interval, key, and Roman-numeral primitives for the SATB harmonizer.
//!
//! This crate is the harmonic alphabet everything else is built from: `satb-harmony` voices
//! progressions over it, `satb-api` parses request strings into it, `satb-cli` prints it back out.
//! It has no knowledge of voicing, scoring, or the wire format — those live one layer up.

pub mod interval;
pub mod key;
pub mod numeral;
pub mod pitch;

pub use interval::{Interval, SimpleIntervalName};
pub use key::{Key, Mode};
pub use numeral::{Degree, ExpandedChord, Inversion, Numeral, TriadQuality};
pub use pitch::{DiatonicStep, Pitch, PitchClass};
