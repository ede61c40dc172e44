pub mod solsim_vis2d;
