mod guild;
mod starboard;
mod tag;
