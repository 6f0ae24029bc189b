mod loading;
mod resolver;
