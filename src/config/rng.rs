/// Representation for the probability of trying the positive polarity of a chosen atom first.
pub type PolarityLean = f64;
