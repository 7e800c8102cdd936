pub mod shared {
    pub mod config;
    pub mod constants;
    pub mod debouncer;
}

pub mod language {
    pub mod domain {
        pub mod catalog;
        pub mod language;
        pub mod language_tabs;
    }
}

pub mod translation {
    pub mod domain {
        pub mod translation_request;
        pub mod translator;
    }
    pub mod infrastructure;
}

pub mod speech {
    pub mod domain {
        pub mod speech_synthesizer;
    }
    pub mod infrastructure;
}

pub mod clipboard {
    pub mod domain {
        pub mod clipboard_writer;
    }
    pub mod infrastructure;
}

pub mod panel {
    pub mod translate_panel;
}

pub mod controller {
    pub mod host_actions;
    pub mod translate_controller;
}
