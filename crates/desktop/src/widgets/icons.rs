use iced::widget::svg::Handle;

pub fn logo() -> Handle {
    Handle::from_memory(include_bytes!("../../assets/logo.svg").as_slice())
}

pub fn speaker() -> Handle {
    Handle::from_memory(include_bytes!("../../assets/sound.svg").as_slice())
}

pub fn copy() -> Handle {
    Handle::from_memory(include_bytes!("../../assets/copy.svg").as_slice())
}

pub fn swap() -> Handle {
    Handle::from_memory(include_bytes!("../../assets/swap.svg").as_slice())
}

pub fn expand() -> Handle {
    Handle::from_memory(include_bytes!("../../assets/expand_down.svg").as_slice())
}
