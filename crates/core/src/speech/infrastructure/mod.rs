pub mod system_speech;
