pub mod decode;
pub mod error;
pub mod input;
pub mod params;
pub mod points;
pub mod solve;

pub use decode::{decode_points, decode_value, DecodedInput};
pub use error::{MalformedInput, SecretError, SecretResult};
pub use input::{Base, EncodedValue, InputDocument, Keys};
pub use params::SolverConfig;
pub use points::PointRecord;
pub use solve::{find_constant, find_constant_with, interpolate};
