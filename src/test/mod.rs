mod sample;
mod support;
