pub mod sine_gradient;
