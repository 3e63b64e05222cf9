mod test_reveal;
