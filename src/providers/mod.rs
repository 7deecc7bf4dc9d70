pub mod argentina_datos;
pub mod dolar_api;
