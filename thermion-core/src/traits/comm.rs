//! Serial command link seam

pub trait CommandLink {
    /// Parse and execute whatever complete command is buffered
    fn process(&mut self);

    /// True while the link still needs its clock to finish a transfer,
    /// which caps sleep at the shallowest depth
    fn needs_clock(&self) -> bool;
}
