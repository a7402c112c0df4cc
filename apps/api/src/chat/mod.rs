// AI chat — proxies a conversation straight through to the model.

pub mod handlers;
