mod expansion;
mod helpers;
mod series_flow;
