mod autodiff;
mod newton;
