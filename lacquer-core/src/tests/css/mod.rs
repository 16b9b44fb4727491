mod util;

mod animation;
mod border_image;
mod computed;
mod fast_paths;
mod parser;
mod primitive;
mod value;
