//! Two-digit flip card state.
//!
//! A [`DigitDisplay`] holds the value currently shown on one flip card and
//! the value it is flipping away from. Every change bumps a generation
//! counter; the renderer restarts its flip animation whenever it sees a new
//! generation, so a flip already in progress is always cut short and the new
//! one plays from the beginning.

/// Faces of a flip card at the moment of the last transition.
///
/// `top` is the static upper half, `bottom` the static lower half, `back` the
/// flap folding down and `back_bottom` the lower half revealed by the flap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipFaces {
    pub top: String,
    pub bottom: String,
    pub back: String,
    pub back_bottom: String,
}

#[derive(Debug, Clone)]
pub struct DigitDisplay {
    label: &'static str,
    current: String,
    previous: Option<String>,
    generation: u64,
}

impl DigitDisplay {
    /// Create a display showing `value`. The initial value is rendered
    /// without a transition.
    pub fn new(label: &'static str, value: i64) -> Self {
        Self {
            label,
            current: two_digits(value),
            previous: None,
            generation: 0,
        }
    }

    /// Show `value`, flipping only if the formatted text differs from what
    /// is on the card. Returns true when a transition was triggered.
    pub fn update(&mut self, value: i64) -> bool {
        let next = two_digits(value);
        if next == self.current {
            return false;
        }

        let outgoing = std::mem::replace(&mut self.current, next);
        self.previous = Some(outgoing);
        self.generation = self.generation.wrapping_add(1);
        true
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn current_value(&self) -> &str {
        &self.current
    }

    /// The value shown before the last transition, if any transition happened.
    pub fn previous_value(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Monotonic transition counter; 0 until the first flip.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn faces(&self) -> FlipFaces {
        let outgoing = self.previous.as_deref().unwrap_or(&self.current);
        FlipFaces {
            top: self.current.clone(),
            bottom: outgoing.to_string(),
            back: outgoing.to_string(),
            back_bottom: self.current.clone(),
        }
    }
}

/// Zero-padded last two decimal digits of `value`. Values outside 0..=99
/// wrap rather than fail.
pub fn two_digits(value: i64) -> String {
    format!("{:02}", value.rem_euclid(100))
}
