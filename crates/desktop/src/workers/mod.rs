pub mod translate_worker;
