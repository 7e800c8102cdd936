pub mod mymemory_translator;
