pub(crate) mod ease;
pub(crate) mod kenburns;
pub(crate) mod keyframes;
