//! Ways to get a collected rule table out of the process besides `constructpeg`.

pub mod json;
